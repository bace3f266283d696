//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{OptionalUser, take_flash};
use crate::models::CurrentUser;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

/// Display the about page.
#[instrument(skip_all)]
pub async fn about(session: Session, OptionalUser(current_user): OptionalUser) -> AboutTemplate {
    AboutTemplate {
        current_user,
        flash: take_flash(&session).await,
    }
}

/// Display the contact page.
#[instrument(skip_all)]
pub async fn contact(
    session: Session,
    OptionalUser(current_user): OptionalUser,
) -> ContactTemplate {
    ContactTemplate {
        current_user,
        flash: take_flash(&session).await,
    }
}
