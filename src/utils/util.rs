use crate::punnett::GenotypeError;

pub type Result<T> = std::result::Result<T, String>;

impl From<GenotypeError> for String {
    fn from(err: GenotypeError) -> Self {
        err.to_string()
    }
}

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
