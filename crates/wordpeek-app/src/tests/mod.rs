mod terminal_tests;
