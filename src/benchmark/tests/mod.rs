mod runner_tests;
