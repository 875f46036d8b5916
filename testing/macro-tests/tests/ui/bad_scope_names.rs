use colscope::prelude::*;

#[derive(Scopes)]
#[scopes(names(user_id, for_ok, seller))]
pub struct Monkey {
    pub user_id: u64,
}

fn main() {
    let monkey = Monkey { user_id: 1 };
    let _ = monkey.user_id;
}
