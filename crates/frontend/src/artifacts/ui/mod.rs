mod list;

pub use list::ArtifactListView;
