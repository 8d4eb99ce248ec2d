mod helper;
mod users;
