mod animations_tests;
mod declarations_tests;
mod selectors_tests;
mod storyboards_tests;
mod trivia_tests;
mod triggers_tests;
