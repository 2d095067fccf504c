mod light_cycle;
mod schedule_builder;
mod submission;
