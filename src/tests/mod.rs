// Test modules for Screenwall
// Each module tests the corresponding source file

mod helpers;
mod tui_tests;
