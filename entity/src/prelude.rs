pub use super::account::Entity as Account;
pub use super::auth_token::Entity as AuthToken;
pub use super::classification::Entity as Classification;
pub use super::gallery_image::Entity as GalleryImage;
pub use super::game_match::Entity as GameMatch;
pub use super::match_series::Entity as MatchSeries;
pub use super::match_series_match::Entity as MatchSeriesMatch;
pub use super::participant::Entity as Participant;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
