mod test_auth;
mod test_config;
mod test_services;
