use crate::model::contact::ContactMessageDto;

/// Parameters for storing a contact form submission.
#[derive(Debug, Clone)]
pub struct CreateContactMessageParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl CreateContactMessageParams {
    pub fn from_dto(dto: ContactMessageDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            subject: dto.subject,
            message: dto.message,
        }
    }
}
