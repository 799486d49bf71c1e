pub mod hilite;
