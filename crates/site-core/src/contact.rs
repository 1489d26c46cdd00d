/// Local state of the contact form. Submitting only logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: &str) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.to_string();
    }

    /// Fields that are still empty (after trimming).
    pub fn missing(&self) -> Vec<ContactField> {
        [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(f, _)| f)
        .collect()
    }

    /// Log the submission and clear the form. Returns false (keeping the
    /// state) when a field is missing.
    pub fn submit(&mut self) -> bool {
        let missing = self.missing();
        if !missing.is_empty() {
            log::warn!("[contact] missing fields: {:?}", missing);
            return false;
        }
        log::info!(
            "[contact] submitted: name={} email={} message_len={}",
            self.name,
            self.email,
            self.message.len()
        );
        *self = Self::default();
        true
    }
}
