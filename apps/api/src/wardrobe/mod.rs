// Wardrobe: the user's clothing inventory — categorization, the persistence
// surface, and the item endpoints. Generation reads inventory only through
// this module.

pub mod categorizer;
pub mod handlers;
pub mod store;
