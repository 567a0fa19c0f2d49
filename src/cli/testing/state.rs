use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual contents of a repo directory. Unset fields
/// correspond to nonexistent files. The data file is located through the
/// config, or the default config if there is none.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    data: Option<String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's CSV data file contents.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Reads files from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = fs
            .path::<base::Config>()
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let data_path = fs.source_path(config.as_ref().unwrap_or(&base::Config::default()));
        let data = data_path
            .exists()
            .then(|| std::fs::read_to_string(data_path).unwrap());
        Self { config, data }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    data: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's CSV data file contents.
    pub fn with_data(mut self, s: &'a str) -> Self {
        self.data = Some(s);
        self
    }

    fn parsed_config(&self) -> Option<base::Config> {
        self.config.map(|s| {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            obj.unwrap()
        })
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        let config = self.parsed_config();
        if let Some(s) = self.config {
            std::fs::write(fs.path::<base::Config>(), s).unwrap();
        }
        if let Some(s) = self.data {
            let path = fs.source_path(config.as_ref().unwrap_or(&base::Config::default()));
            std::fs::write(path, s).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        State {
            config: self.parsed_config(),
            data: self.data.map(str::to_string),
        }
    }
}
