//! JavaScript template variant

use super::Template;
use crate::tree::Directory;

pub(super) fn template() -> Template {
    Template {
        name: "javascript",
        main: "src/{name}.js",
        scripts: &[
            ("lint", "eslint src --ext js,mjs --fix"),
            ("format", "prettier --write \"src/**/*.js\""),
        ],
        dependencies: &[
            "discord.js",
            "@sapphire/framework",
            "@sapphire/plugin-logger",
        ],
        dev_dependencies: &[
            "@sapphire/eslint-config",
            "@sapphire/prettier-config",
            "@sapphire/ts-config",
        ],
        files: files(),
    }
}

fn files() -> Directory {
    Directory::new(":root-javascript")
        .file_lines(
            ".gitignore",
            [
                "# Ignore a blackhole and the folder for development",
                "node_modules/",
                ".vs/",
                ".idea/",
                "*.iml",
                "",
                "# Environment variables",
                ".DS_Store",
                ".env",
                "",
                "# Ignore the config file (contains sensitive information such as tokens)",
                "config{file-extension}",
                "",
                "# Ignore heapsnapshot and log files",
                "*.heapsnapshot",
                "*.log",
                "",
                "# Ignore package locks",
                "{ignored-package-locks}",
            ],
        )
        .file_lines(
            "tsconfig.eslint.json",
            [
                "{",
                "\t\"extends\": \"@sapphire/ts-config\",",
                "\t\"include\": [\"src\"]",
                "}",
            ],
        )
        .dir("src", |src| {
            src.dir("commands", |commands| {
                commands.dir("General", |general| {
                    general.file_lines(
                        "ping{file-extension}",
                        [
                            "{import:@sapphire/framework, Command};",
                            "",
                            "{export} class UserCommand extends Command {",
                            "\tconstructor(context) {",
                            "\t\tsuper(context, { aliases: ['pong'] });",
                            "\t}",
                            "",
                            "\tasync run(message, args) {",
                            "\t\tconst msg = await message.channel.send('Ping...');",
                            "\t\treturn message.send(`Pong! Took: ${msg.createdTimestamp - message.createdTimestamp}ms!`);",
                            "\t}",
                            "};",
                        ],
                    )
                })
            })
            .dir("events", |events| {
                events.file_lines(
                    "mentionPrefixOnly{file-extension}",
                    [
                        "{import:@sapphire/framework, Event};",
                        "",
                        "{export} class UserEvent extends Event {",
                        "\tasync run(message) {",
                        "\t\tconst prefix = '$';",
                        "\t\treturn message.channel.send(prefix ? `My prefix in this guild is: \\`${prefix}\\`` : 'You do not need a prefix in DMs.');",
                        "\t}",
                        "};",
                    ],
                )
            })
            .file_lines(
                "{name}{file-extension}",
                [
                    "{import:@sapphire/framework, LogLevel SapphireClient};",
                    "{import:@sapphire/plugin-logger/register}",
                    "{import:./config, BOT_TOKEN}",
                    "",
                    "const client = new SapphireClient({",
                    "\tdefaultPrefix: '$',",
                    "\tcaseInsensitiveCommands: true,",
                    "\tlogger: {",
                    "\t\tlevel: LogLevel.Trace",
                    "\t},",
                    "\tshards: 'auto',",
                    "\tws: {",
                    "\t\tintents: [",
                    "\t\t\t'GUILDS',",
                    "\t\t\t'GUILD_BANS',",
                    "\t\t\t'GUILD_EMOJIS',",
                    "\t\t\t'GUILD_VOICE_STATES',",
                    "\t\t\t'GUILD_MESSAGES',",
                    "\t\t\t'GUILD_MESSAGE_REACTIONS',",
                    "\t\t\t'DIRECT_MESSAGES',",
                    "\t\t\t'DIRECT_MESSAGE_REACTIONS'",
                    "\t\t]",
                    "\t}",
                    "});",
                    "",
                    "async function main() {",
                    "\ttry {",
                    "\t\tclient.logger.info('Logging in');",
                    "\t\tawait client.login(BOT_TOKEN);",
                    "\t\tclient.logger.info('Logged in');",
                    "\t} catch (error) {",
                    "\t\tclient.logger.fatal(error);",
                    "\t\tclient.destroy();",
                    "\t\tprocess.exit(1);",
                    "\t}",
                    "};",
                    "",
                    "main();",
                ],
            )
            .file("config.example{file-extension}", "{export:BOT_TOKEN} '';")
        })
}
