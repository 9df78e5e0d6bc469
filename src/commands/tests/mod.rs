mod plot_command_tests;
