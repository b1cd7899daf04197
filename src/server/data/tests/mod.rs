mod analysis;
mod edital;
mod expiry_alert;
