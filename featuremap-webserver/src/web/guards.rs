/// Version of the running service, reported by the API.
#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
