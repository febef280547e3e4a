// inlistdiff/src/constants.rs

/// Environment variable pointing at the MESA installation
pub const MESA_DIR_ENV: &str = "MESA_DIR";

/// Settings file looked up in the current directory when `--config` is not given
pub const DEFAULT_CONFIG_NAME: &str = ".inlistdiff.yml";

/// Inlist MESA starts reading from in a work directory
pub const FIRST_INLIST_NAME: &str = "inlist";

/// Number of `read_extra_<namelist>_inlist` slots per namelist
pub const MAX_EXTRA_INLISTS: usize = 5;

/// Key holding the starting inlist of each star in `&binary_job`
pub const STAR_INLIST_KEYS: [&str; 2] = ["inlist_names(1)", "inlist_names(2)"];

/// Report column widths; labels are short, the longest MESA option is ~45 chars
pub const LABEL_WIDTH: usize = 30;
pub const VALUE_WIDTH: usize = 45;

/// Label shown next to default values in reports
pub const DEFAULT_LABEL: &str = "default";
