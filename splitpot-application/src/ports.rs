use crate::{error::SheetParseError, model::ExpenseSheet};
use indexmap::IndexMap;
use splitpot_domain::MemberId;

pub trait SheetParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<ExpenseSheet<'a>, SheetParseError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: MemberId) -> Option<&str>;
}

impl MemberDirectory for IndexMap<MemberId, String> {
    fn display_name(&self, member_id: MemberId) -> Option<&str> {
        self.get(&member_id).map(String::as_str)
    }
}
