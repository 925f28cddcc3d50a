use assert_json_diff::assert_json_eq;
use marketplace_client::model::requests::{
    AnalyzeDealRequest, ListingFilter, PaymentIntentRequest, ReturnToSeedStackRequest,
};
use serde_json::json;

fn json_value<T: serde::Serialize>(v: &T) -> serde_json::Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn listing_filter_builders() {
    let filter = ListingFilter::new()
        .with_status("active")
        .with_industry("Technology")
        .with_revenue(Some(1_000_000.0), None)
        .with_profit(None, Some(500_000.0))
        .with_location("Austin")
        .with_search("saas")
        .with_page(20, 10);

    assert_eq!(filter.status.as_deref(), Some("active"));
    assert_eq!(filter.industry.as_deref(), Some("Technology"));
    assert_eq!(filter.min_revenue, Some(1_000_000.0));
    assert_eq!(filter.max_revenue, None);
    assert_eq!(filter.min_profit, None);
    assert_eq!(filter.max_profit, Some(500_000.0));
    assert_eq!(filter.skip, Some(20));
    assert_eq!(filter.limit, Some(10));
}

#[test]
fn listing_filter_omits_unset_fields() {
    assert_json_eq!(json_value(&ListingFilter::new()), json!({}));

    let filter = ListingFilter::new().with_industry("Food Service").with_page(0, 5);
    assert_json_eq!(
        json_value(&filter),
        json!({"industry": "Food Service", "skip": 0, "limit": 5})
    );
}

#[test]
fn payment_intent_request_shape() {
    let request = PaymentIntentRequest {
        amount: 2500.0,
        currency: "usd".to_string(),
        metadata: json!({"listing_id": "l-1"}),
    };
    assert_json_eq!(
        json_value(&request),
        json!({"amount": 2500.0, "currency": "usd", "metadata": {"listing_id": "l-1"}})
    );
}

#[test]
fn integration_request_shapes() {
    let analyze = AnalyzeDealRequest {
        deal_id: "d-1".to_string(),
        analysis_type: "funding_decision".to_string(),
    };
    assert_json_eq!(
        json_value(&analyze),
        json!({"deal_id": "d-1", "analysis_type": "funding_decision"})
    );

    let back = ReturnToSeedStackRequest {
        deal_id: "d-1".to_string(),
        funding_secured: false,
        funding_details: None,
    };
    assert_json_eq!(
        json_value(&back),
        json!({"deal_id": "d-1", "funding_secured": false, "funding_details": null})
    );
}
