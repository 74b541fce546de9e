//! Consultation request form: field validation and simulated submission.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, info};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Service types offered in the form's drop-down.
pub const SERVICE_TYPES: [(&str, &str); 6] = [
    ("residential", "Residential Design"),
    ("commercial", "Commercial Design"),
    ("hospitality", "Hospitality Design"),
    ("renovation", "Renovation Consulting"),
    ("furniture", "Custom Furniture"),
    ("virtual", "Virtual Design"),
];

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    ServiceType,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?}: {}", self.field, self.message)
    }
}

/// Values typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub message: String,
}

impl ContactDetails {
    /// Checks every field. All failures are reported, in field order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field, message| {
            if !ok {
                errors.push(FieldError { field, message });
            }
        };

        check(
            self.name.trim().chars().count() >= MIN_NAME_CHARS,
            ContactField::Name,
            "Name must be at least 2 characters.",
        );
        check(
            EMAIL_RE.is_match(self.email.trim()),
            ContactField::Email,
            "Please enter a valid email address.",
        );
        check(
            self.phone.trim().chars().count() >= MIN_PHONE_CHARS,
            ContactField::Phone,
            "Please enter a valid phone number.",
        );
        check(
            SERVICE_TYPES.iter().any(|(id, _)| *id == self.service_type),
            ContactField::ServiceType,
            "Please select a service type.",
        );
        check(
            self.message.trim().chars().count() >= MIN_MESSAGE_CHARS,
            ContactField::Message,
            "Message must be at least 10 characters.",
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Idle,
    Submitting { elapsed: Duration },
    /// Sent; the confirmation shows until the form is edited again.
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    details: ContactDetails,
    errors: Vec<FieldError>,
    submission: Submission,
    submit_delay: Duration,
}

impl ContactForm {
    pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(submit_delay: Duration) -> Self {
        Self {
            details: ContactDetails::default(),
            errors: Vec::new(),
            submission: Submission::Idle,
            submit_delay,
        }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, Submission::Submitting { .. })
    }

    /// Errors from the last submit attempt.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(
        &self,
        field: ContactField,
    ) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn set_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match field {
            ContactField::Name => self.details.name = value,
            ContactField::Email => self.details.email = value,
            ContactField::Phone => self.details.phone = value,
            ContactField::ServiceType => self.details.service_type = value,
            ContactField::Message => self.details.message = value,
        }
        if self.submission == Submission::Submitted {
            self.submission = Submission::Idle;
        }
    }

    /// Validates and starts submission. While a submission is running this
    /// is a no-op.
    pub fn submit(&mut self) -> Result<(), Vec<FieldError>> {
        if self.is_submitting() {
            return Ok(());
        }
        if let Err(errors) = self.details.validate() {
            debug!(count = errors.len(), "contact form rejected");
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors.clear();
        self.submission = Submission::Submitting {
            elapsed: Duration::ZERO,
        };
        if self.submit_delay.is_zero() {
            self.complete();
        }
        Ok(())
    }

    fn complete(&mut self) {
        info!(service_type = %self.details.service_type, "consultation request submitted");
        self.details = ContactDetails::default();
        self.submission = Submission::Submitted;
    }

    /// Advances time by `dt`. Returns `true` when a submission completed.
    pub fn tick(
        &mut self,
        dt: Duration,
    ) -> bool {
        let Submission::Submitting { elapsed } = &mut self.submission else {
            return false;
        };
        *elapsed += dt;
        if *elapsed < self.submit_delay {
            return false;
        }
        self.complete();
        true
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUBMIT_DELAY)
    }
}
