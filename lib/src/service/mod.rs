pub mod chat_service;
pub mod classifier_service;
pub mod common_structs;


#[derive(Debug, Clone)]
pub struct CommonService {
    pub classifier: classifier_service::ClassifierService,
    pub chat: chat_service::ChatService,
}

impl CommonService {
    pub fn new() -> Self {
        Self {
            classifier: classifier_service::ClassifierService::new(),
            chat: chat_service::ChatService::new(),
        }
    }
}
