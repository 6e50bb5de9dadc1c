use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use super::LinearModel;
use crate::error::{Result, SerializationSource, TrainErr};

/// Bumped whenever `LinearModel`'s encoding changes.
pub const FORMAT_VERSION: u32 = 1;

/// What actually lands on disk: the model plus the version it was encoded with.
///
/// The encoding is bincode and is only meant to be read back by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub model: LinearModel,
}

impl ModelArtifact {
    pub fn new(model: LinearModel) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            model,
        }
    }

    /// Encodes the artifact into `path`, truncating any existing file.
    ///
    /// The file is closed before returning, whether or not the write succeeded.
    ///
    /// # Errors
    /// `TrainErr::Serialization` on any create, encode or flush failure.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let err = |source| TrainErr::serialization(path, source);

        let file = File::create(path).map_err(|e| err(SerializationSource::Io(e)))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .map_err(|e| err(SerializationSource::Encoding(e)))?;
        writer
            .flush()
            .map_err(|e| err(SerializationSource::Io(e)))?;

        info!("saved model to {}", path.display());
        Ok(())
    }

    /// Decodes an artifact previously written by [`ModelArtifact::write_to_path`].
    ///
    /// # Errors
    /// `TrainErr::Serialization` if the file can't be read, doesn't decode, or
    /// was written with another format version.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let err = |source| TrainErr::serialization(path, source);

        let file = File::open(path).map_err(|e| err(SerializationSource::Io(e)))?;
        let artifact: Self = bincode::deserialize_from(BufReader::new(file))
            .map_err(|e| err(SerializationSource::Encoding(e)))?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(err(SerializationSource::UnsupportedVersion {
                got: artifact.format_version,
                expected: FORMAT_VERSION,
            }));
        }

        Ok(artifact)
    }
}

/// Saves `model` to `path`. See [`ModelArtifact::write_to_path`].
pub fn save_model<P: AsRef<Path>>(model: &LinearModel, path: P) -> Result<()> {
    ModelArtifact::new(model.clone()).write_to_path(path)
}

/// Loads the model stored at `path`. See [`ModelArtifact::read_from_path`].
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearModel> {
    ModelArtifact::read_from_path(path).map(|artifact| artifact.model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    fn model() -> LinearModel {
        LinearModel::new(
            vec!["speed".into(), "engine_temp".into()],
            "fuel_efficiency",
            vec![-0.0125, 0.031],
            9.75,
        )
        .unwrap()
    }

    #[test]
    fn reloaded_model_predicts_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let original = model();

        save_model(&original, &path).unwrap();
        let restored = load_model(&path).unwrap();

        let x = array![[120.0, 85.5], [0.0, 70.0], [299.0, 140.25]];
        assert_eq!(restored, original);
        assert_eq!(
            restored.predict(x.view()).unwrap(),
            original.predict(x.view()).unwrap()
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, vec![0xAB; 4096]).unwrap();

        save_model(&model(), &path).unwrap();
        assert_eq!(load_model(&path).unwrap(), model());
        assert!(std::fs::metadata(&path).unwrap().len() < 4096);
    }

    #[test]
    fn unwritable_path_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("model.bin");

        assert!(matches!(
            save_model(&model(), &path),
            Err(TrainErr::Serialization {
                source: SerializationSource::Io(_),
                ..
            })
        ));
    }

    #[test]
    fn garbage_does_not_decode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"not a model").unwrap();

        assert!(matches!(
            load_model(&path),
            Err(TrainErr::Serialization { .. })
        ));
    }

    #[test]
    fn future_versions_are_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let artifact = ModelArtifact {
            format_version: FORMAT_VERSION + 1,
            model: model(),
        };
        artifact.write_to_path(&path).unwrap();

        assert!(matches!(
            ModelArtifact::read_from_path(&path),
            Err(TrainErr::Serialization {
                source: SerializationSource::UnsupportedVersion { got: 2, expected: 1 },
                ..
            })
        ));
    }
}
