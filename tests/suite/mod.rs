mod config_answer;
mod editing;
mod persistence;
