pub(crate) mod aggregation;
pub(crate) mod output;
pub(crate) mod playlists;
pub(crate) mod ranking_service;
pub(crate) mod scoring;
