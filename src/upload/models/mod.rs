pub mod upload_artifact;
