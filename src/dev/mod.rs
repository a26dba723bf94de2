/// Development utilities module
///
/// This module contains utilities for development and testing,
/// such as a backend client that serves fixture data.

pub mod mock_client;
