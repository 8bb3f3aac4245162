mod helpers;
mod operations;
mod failures;
