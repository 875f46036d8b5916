use colscope::prelude::*;

#[derive(Scopes)]
#[scopes(names(for_id))]
pub struct Wrapper<T> {
    pub id: T,
}

fn main() {
    let wrapper = Wrapper { id: 1_u64 };
    let _ = wrapper.id;
}
