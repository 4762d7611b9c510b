use std::io::{BufRead, Write};
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::session::controller::Session;

pub(crate) async fn create_session<R: BufRead, W: Write>(state: &AppState, reader: R, writer: W) -> Session<R, W> {
    let catalog_svc = create_catalog_service(&state.config, state.store).await;
    Session::new(catalog_svc, reader, writer)
}
