//! XML namespaces of the OVAL 5 schema family.

pub const DEFINITIONS: &str = "http://oval.mitre.org/XMLSchema/oval-definitions-5";
pub const COMMON: &str = "http://oval.mitre.org/XMLSchema/oval-common-5";
pub const LINUX: &str = "http://oval.mitre.org/XMLSchema/oval-definitions-5#linux";
