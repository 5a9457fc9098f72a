pub mod guess;
