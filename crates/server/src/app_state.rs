use crate::{
    api::ApiContext,
    render::{Renderer, SiteInfo},
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) api: ApiContext,
    pub(crate) renderer: Renderer,
    pub(crate) site: SiteInfo,
}
