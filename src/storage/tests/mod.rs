mod gateway_tests;
mod layout_tests;
