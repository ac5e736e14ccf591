mod helpers;
mod lists;
