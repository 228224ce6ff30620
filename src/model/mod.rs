/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// API version selection and detection
pub mod api_version;
/// HTTP request primitive and raw responses
pub mod http;
/// Request options and bodies for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
