mod access_tests;
