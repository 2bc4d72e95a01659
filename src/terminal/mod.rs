pub(crate) mod category;
pub(crate) mod output;
pub(crate) mod responses;
pub(crate) mod template;
pub(crate) mod timeline;
