pub mod community;
pub mod congratulations;
pub mod declaration;
pub mod final_screen;
pub mod instructions;
pub mod music_setup;
pub mod report;
pub mod rewards;
pub mod splash;
pub mod study;
pub mod welcome;
