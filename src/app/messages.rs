//! Operator-facing banners around the pipeline.

use console::style;

pub fn welcome() {
    println!();
    println!("Configuring your new pod library.");
    println!("{}", style("---------------------------------").dim());
}

pub fn farewell(pod_name: &str) {
    println!();
    println!("{} {} is ready.", style("Done!").green(), pod_name);
    println!("Open Example/{}.xcworkspace to get started.", pod_name);
}
