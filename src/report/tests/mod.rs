mod axis_tests;
mod chart_tests;
