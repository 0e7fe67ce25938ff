pub static CLASSIFIER_ENDPOINT: &str = "CLASSIFIER_ENDPOINT";
pub static CLASSIFIER_MODEL: &str = "CLASSIFIER_MODEL";
pub static CLASSIFIER_API_TOKEN: &str = "CLASSIFIER_API_TOKEN";

pub static OLLAMA_HOST: &str = "OLLAMA_HOST";
pub static CHAT_MODEL: &str = "CHAT_MODEL";

pub static BIND_ADDRESS: &str = "BIND_ADDRESS";
