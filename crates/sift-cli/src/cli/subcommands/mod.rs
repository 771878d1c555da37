mod article;
mod criteria;
mod extraction;
mod keyword;
mod quality;
mod question;
mod review;
mod session;
mod source;
mod user;

pub use article::{ArticleCommands, ArticleFields};
pub use criteria::CriteriaCommands;
pub use extraction::ExtractionCommands;
pub use keyword::KeywordCommands;
pub use quality::QualityCommands;
pub use question::QuestionCommands;
pub use review::ReviewCommands;
pub use session::SessionCommands;
pub use source::SourceCommands;
pub use user::UserCommands;
