mod test_destroy_semantics;
mod test_misconfigured_connect;
