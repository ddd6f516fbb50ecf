use inner::reexport_members;

reexport_members! {
    index_bounds,
}
