mod fields;
mod status;
mod validation;

pub use fields::{ContactFields, FieldError, FieldName};
pub use status::{Phase, SubmissionStatus};
pub use validation::{ValidationError, validate_email, validate_fields, validate_required};
