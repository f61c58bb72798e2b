use std::sync::Arc;

use commerce_core::application::CommerceService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CommerceService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CommerceService) -> Self {
        Self { args, service }
    }
}
