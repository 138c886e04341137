//! Field checks applied before a record is added or updated.
//!
//! Messages are user-facing and in Portuguese, like the rest of the site.

use crate::error::{FieldError, Result, VitrineError};
use crate::model::{
    PortfolioDraft, PortfolioItem, ServiceDraft, ServiceItem, TeamMember, TeamMemberDraft,
};

pub trait Validate {
    fn field_errors(&self) -> Vec<FieldError>;

    fn validate(&self) -> Result<()> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(VitrineError::Validation(errors))
        }
    }
}

fn required(errors: &mut Vec<FieldError>, value: &str, field: &'static str, message: &'static str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

pub fn is_svg_markup(icon: &str) -> bool {
    let icon = icon.trim();
    icon.starts_with("<svg") && icon.ends_with("</svg>")
}

fn portfolio_errors(title: &str, category: &str, image_url: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    required(&mut errors, title, "title", "O título é obrigatório.");
    required(&mut errors, category, "category", "A categoria é obrigatória.");
    required(&mut errors, image_url, "imageurl", "A URL da imagem é obrigatória.");
    errors
}

fn service_errors(title: &str, description: &str, icon: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    required(&mut errors, title, "title", "O título é obrigatório.");
    required(&mut errors, description, "description", "A descrição é obrigatória.");
    if !is_svg_markup(icon) {
        errors.push(FieldError::new("icon", "O ícone deve ser um código SVG válido."));
    }
    errors
}

fn team_errors(name: &str, role: &str, image_url: &str, bio: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    required(&mut errors, name, "name", "O nome é obrigatório.");
    required(&mut errors, role, "role", "O cargo é obrigatório.");
    required(&mut errors, image_url, "imageUrl", "A URL da imagem é obrigatória.");
    required(&mut errors, bio, "bio", "A bio é obrigatória.");
    errors
}

impl Validate for PortfolioDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        portfolio_errors(&self.title, &self.category, &self.image_url)
    }
}

impl Validate for PortfolioItem {
    fn field_errors(&self) -> Vec<FieldError> {
        portfolio_errors(&self.title, &self.category, &self.image_url)
    }
}

impl Validate for ServiceDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        service_errors(&self.title, &self.description, &self.icon)
    }
}

impl Validate for ServiceItem {
    fn field_errors(&self) -> Vec<FieldError> {
        service_errors(&self.title, &self.description, &self.icon)
    }
}

impl Validate for TeamMemberDraft {
    fn field_errors(&self) -> Vec<FieldError> {
        team_errors(&self.name, &self.role, &self.image_url, &self.bio)
    }
}

impl Validate for TeamMember {
    fn field_errors(&self) -> Vec<FieldError> {
        team_errors(&self.name, &self.role, &self.image_url, &self.bio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_portfolio_fields_are_reported() {
        let draft = PortfolioDraft::new("  ", "Web", "");
        let fields: Vec<&str> = draft.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "imageurl"]);
    }

    #[test]
    fn service_icon_must_be_svg() {
        let mut draft = ServiceDraft {
            icon: "<img src=x>".into(),
            title: "T".into(),
            description: "D".into(),
        };
        let errors = draft.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "O ícone deve ser um código SVG válido.");

        draft.icon = "  <svg viewBox=\"0 0 1 1\"></svg>\n".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn team_requires_every_text_field() {
        let draft = TeamMemberDraft::default();
        assert_eq!(draft.field_errors().len(), 4);
        assert!(matches!(draft.validate(), Err(VitrineError::Validation(_))));
    }
}
