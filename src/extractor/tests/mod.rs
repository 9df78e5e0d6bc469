mod chip_tests;
mod region_tests;
