mod test_auth_service;
mod test_file_service;
mod test_listing_service;
