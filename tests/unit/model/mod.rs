mod test_api_version;
