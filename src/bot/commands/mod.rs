pub mod attendance;
pub mod utility;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Attendance Bot commands:")]
pub enum AttendanceCommand {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Register your username with the bot")]
    Start,
    #[command(description = "Register your username with the bot")]
    Register,
    #[command(description = "Start an attendance session for a class")]
    StartAttendance,
    #[command(description = "Mark yourself present in the current session")]
    MarkAttendance,
    #[command(description = "Cancel attendance session creation")]
    Cancel,
}

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum UtilityCommand {
    #[command(description = "Say hi")]
    Start,
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Solve a*x^2 + b*x + c = 0, e.g. /quadratic 1 -3 2")]
    Quadratic { coefficients: String },
    #[command(description = "Get a random cat picture")]
    Cat,
}
