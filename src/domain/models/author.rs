use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Bot => return String::from("Ocean"),
        }
    }
}
