mod deposits;
mod helpers;
