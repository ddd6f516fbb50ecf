use inner::reexport_members;

reexport_members! {
    quick_find,
    quick_union,
    union_find,
}
