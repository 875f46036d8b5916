use colscope::prelude::*;

#[derive(Scopes)]
#[scopes(names(by_), prefix = "by_")]
pub struct Keeper {
    pub id: u64,
}

fn main() {
    let keeper = Keeper { id: 1 };
    let _ = keeper.id;
}
