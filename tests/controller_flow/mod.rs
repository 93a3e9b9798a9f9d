mod editing;
mod modes;
mod selection;
mod support;
